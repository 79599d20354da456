use std::time::Duration;

/// Timeouts and simulated latencies used across the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Per-request HTTP timeout (default: 30 seconds)
    pub http_request: Duration,

    /// Delay before the canned orders are returned (default: 500 ms)
    pub mock_orders_latency: Duration,

    /// Delay before the canned monthly sales are returned (default: 300 ms)
    pub mock_sales_latency: Duration,

    /// Interval between picker readiness checks (default: 100 ms)
    pub picker_poll: Duration,

    /// How long to wait for the picker library to become ready (default: 10 seconds)
    pub picker_load_timeout: Duration,

    /// Per-candidate image probe timeout (default: 5 seconds)
    pub image_probe: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            mock_orders_latency: Duration::from_millis(500),
            mock_sales_latency: Duration::from_millis(300),
            picker_poll: Duration::from_millis(100),
            picker_load_timeout: Duration::from_secs(10),
            image_probe: Duration::from_secs(5),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set HTTP request timeout
    pub fn with_http_request(mut self, duration: Duration) -> Self {
        self.http_request = duration;
        self
    }

    /// Builder pattern: set both mock data latencies
    pub fn with_mock_latency(mut self, orders: Duration, sales: Duration) -> Self {
        self.mock_orders_latency = orders;
        self.mock_sales_latency = sales;
        self
    }

    /// Builder pattern: set picker polling interval and load timeout
    pub fn with_picker(mut self, poll: Duration, load_timeout: Duration) -> Self {
        self.picker_poll = poll;
        self.picker_load_timeout = load_timeout;
        self
    }

    /// Builder pattern: set image probe timeout
    pub fn with_image_probe(mut self, duration: Duration) -> Self {
        self.image_probe = duration;
        self
    }

    /// No artificial delays, for tests
    pub fn instant() -> Self {
        Self::default().with_mock_latency(Duration::ZERO, Duration::ZERO)
    }
}
