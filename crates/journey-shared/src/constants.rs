/// Application name
pub const APP_NAME: &str = "Journey Dashboard";

/// Route serving the full journey document
pub const JOURNEY_ROUTE: &str = "/api/journey";

/// Health check route
pub const HEALTH_ROUTE: &str = "/health";

/// Default HTTP API port (server)
pub const DEFAULT_HTTP_PORT: u16 = 3001;

/// File name of the generated fixture
pub const FIXTURE_FILE_NAME: &str = "journeyData.json";

/// Default fixture location, relative to the server's working directory
pub const DEFAULT_FIXTURE_PATH: &str = "./data/journeyData.json";

/// Sender name of the journey member; everyone else is the care team
pub const DEFAULT_MEMBER_NAME: &str = "Rohan Patel";
