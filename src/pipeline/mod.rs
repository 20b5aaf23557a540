// Multi-step analyses that chain extraction and similarity scoring.

pub mod timeline;
