mod report;

pub use report::RunReport;
