//! Report structures, formatters, highlighting and PDF feedback

pub mod highlight;
pub mod report;
pub mod formatter;
pub mod pdf;
