/*
[INPUT]:  Caller arguments, session state and an injected transport
[OUTPUT]: Typed endpoint responses, one network call per method
[POS]:    Repository layer - endpoint operations grouped by resource
[UPDATE]: When adding resource repositories
*/

pub mod direct_thread;

pub use direct_thread::DirectThreadRepository;
