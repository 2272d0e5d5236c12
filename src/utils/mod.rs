pub mod aggregator;
pub mod analyzer;
pub mod archive;
pub mod config;
pub mod errors;
pub mod export_tools;
pub mod fasta_tools;
pub mod file_tools;
pub mod gc_content;
pub mod gc_statistics;
pub mod nucleotides;
pub mod report;
pub mod runner;
pub mod sequence_store;
pub mod types;
pub mod windowed_scan;
