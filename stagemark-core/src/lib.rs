pub mod checksum;
pub mod manifest;
pub mod scan;
pub mod snapshot;
