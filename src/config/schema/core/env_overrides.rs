use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("PULLREQUEST_PROJECT_KEY")
            && !key.is_empty()
        {
            self.project_key = Some(key);
        }

        if let Ok(endpoint) = std::env::var("PULLREQUEST_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.endpoint = Some(endpoint);
        }

        if let Ok(timeout_str) = std::env::var("PULLREQUEST_TIMEOUT_SECS")
            && let Ok(timeout) = timeout_str.parse::<u64>()
            && timeout > 0
        {
            self.timeout_secs = Some(timeout);
        }
    }
}
