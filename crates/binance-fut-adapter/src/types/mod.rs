/*
[INPUT]:  Submodule type definitions
[OUTPUT]: Public type surface
[POS]:    Types module root - re-exports enums, requests and responses
[UPDATE]: When adding new type submodules
*/

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use requests::*;
pub use responses::*;
