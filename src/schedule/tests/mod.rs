//! Property tests for the schedule codec.
