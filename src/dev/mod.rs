/// Development utilities module
///
/// This module contains utilities for development and debugging,
/// such as the fixture-backed mock client.

pub mod mock_client;
