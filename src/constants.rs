// Element ids, attribute names and endpoints used by the web frontend.

// Elements mounted automatically by `start` when present
pub const PARTICLE_CANVAS_ID: &str = "particle-network";
pub const STARFIELD_CONTAINER_ID: &str = "starfield";

// Starfield options read from the container: (option key, attribute)
pub const STARFIELD_DATA_ATTRIBUTES: [(&str, &str); 6] = [
    ("gap", "data-gap"),
    ("radius", "data-radius"),
    ("opacity", "data-opacity"),
    ("speedMin", "data-speed-min"),
    ("speedMax", "data-speed-max"),
    ("speedScale", "data-speed-scale"),
];

// Inline canvas styles: purely visual, never take clicks
pub const PARTICLE_CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;z-index:-1;display:block;pointer-events:none";
pub const STARFIELD_CANVAS_STYLE: &str = "display:block;pointer-events:none";

// Collaborators
pub const CHAT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const CHAT_MODEL: &str = "gemini-3-flash-preview";
pub const CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const CONTACT_NETWORK_ERROR: &str = "Network error during transmission.";
