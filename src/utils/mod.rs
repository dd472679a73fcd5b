//! The utilities module provides general capabilities, that may span the
//! input modeling, models, graph, and output analysis modules.  The
//! utilities are centered around error handling and traceability.

pub mod errors;
