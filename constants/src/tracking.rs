/// Wayspot name used by the native keyboard tracking simulator.
pub const DEBUG_WAYSPOT_NAME: &str = "debug-wayspot";

/// RPC method names sent by the tracking collaborator.
pub const WAYSPOT_FOUND_METHOD: &str = "wayspot_found";
pub const WAYSPOT_UPDATED_METHOD: &str = "wayspot_updated";
pub const WAYSPOT_LOST_METHOD: &str = "wayspot_lost";
