pub mod init;
pub mod report;
pub mod stats;
pub mod topology;
