use crate::github::{ClientConfig, GhClient};
use url::Url;

/// Serves a warp filter on an ephemeral port. Evaluates to `(base_url, server_task)`.
macro_rules! serve {
    ($route:expr) => {{
        let (addr, server) = warp::serve($route).bind_ephemeral(([127, 0, 0, 1], 0));
        let server = tokio::spawn(server);
        let base_url: url::Url = format!("http://{}/", addr).parse().unwrap();
        (base_url, server)
    }};
}

pub fn client_for(base_url: Url) -> GhClient {
    GhClient::new(ClientConfig { base_url, ..Default::default() }).unwrap()
}
