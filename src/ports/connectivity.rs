/// Port for the pre-update reachability probe.
pub trait ConnectivityProbe {
    /// One bounded-timeout reachability attempt. Never retries, never errors.
    fn is_reachable(&self) -> bool;
}
