pub static TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";
pub static API_BASE: &str = "https://api.spotify.com/v1";

/// Registered when the refresh token was minted by hand. The token endpoint
/// rejects the exchange if this doesn't match, even though nothing listens
/// on the other end anymore.
pub static DEFAULT_REDIRECT_URI: &str =
    "https://localhost:40751/.netlify/functions/spotify";

pub static DEFAULT_SCOPE: &str =
    "user-read-email user-read-private user-top-read user-library-read";

pub static TOP_TRACKS_TIME_RANGE: &str = "short_term";
