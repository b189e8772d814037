//! Tests for the status and health probes.

mod status;
