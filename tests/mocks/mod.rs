//! Mock implementations for pipeline tests
//!
//! The extractor writes real files into the test directory so the artifact
//! lifecycle can be observed; the transport records every outbound call.

pub mod mock_extractor;
pub mod mock_transport;

#[allow(unused_imports)]
pub use mock_extractor::{MockBehavior, MockExtractor};
#[allow(unused_imports)]
pub use mock_transport::{RecordingTransport, TransportCall};
