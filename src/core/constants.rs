//! Protocol constants and defaults.

use std::time::Duration;

// =============================================================================
// ANNOUNCEMENT LOG
// =============================================================================

/// Default capacity of the announcement log. Oldest entries are evicted
/// FIFO once the log grows past this.
pub const DEFAULT_LOG_CAPACITY: usize = 100;

// =============================================================================
// TIMING
// =============================================================================

/// Default synchronizer lifetime. Doubles as the fetch-request timeout.
pub const DEFAULT_SYNC_LIFETIME: Duration = Duration::from_millis(5000);

/// Default freshness period of a signed fetch response.
pub const DEFAULT_RESPONSE_FRESHNESS: Duration = Duration::from_millis(4000);

// =============================================================================
// EVENT QUEUE
// =============================================================================

/// Depth of the coordinator's event channel.
pub const EVENT_CHANNEL_DEPTH: usize = 256;
