// Codificador de Instrumentos - core library
//
// Codes policy instruments found in PDF documents against a fixed
// two-dimensional taxonomy (condition x category) and aggregates the
// hits into summary tables.
pub mod aggregate;
pub mod batch;
pub mod export;
pub mod matcher;
pub mod pdf_text;
pub mod taxonomy;
pub mod types;
