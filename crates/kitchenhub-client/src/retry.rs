//! Backoff policy for transient transport failures.
//!
//! A request that never reached the backend (refused connection, DNS
//! failure, timeout) is worth repeating; a request that produced an HTTP
//! response is not, whatever the status code says. Status handling stays
//! with the caller.

use std::time::Duration;

/// Total attempts per request: one initial try plus three retries.
const ATTEMPTS: u32 = 4;

/// Delay before the first retry; doubles each time (200ms, 400ms, 800ms).
const FIRST_BACKOFF: Duration = Duration::from_millis(200);

/// Drive `request` until it yields a response or the attempt budget runs
/// out, sleeping with doubling backoff between tries. Any received HTTP
/// response ends the loop immediately, including 4xx/5xx.
pub(crate) async fn retry_send<F, Fut>(request: F) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut backoff = FIRST_BACKOFF;
    let mut attempt = 1;
    loop {
        match request().await {
            Ok(resp) => return Ok(resp),
            Err(err) if attempt < ATTEMPTS => {
                tracing::warn!(attempt, "transport failure, next try in {backoff:?}: {err}");
                tokio::time::sleep(backoff).await;
                backoff *= 2;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn quick_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap()
    }

    /// A loopback port with nothing listening on it.
    fn dead_url() -> String {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        format!("http://127.0.0.1:{port}/")
    }

    #[tokio::test]
    async fn first_success_means_a_single_call() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = quick_client();
        let uri = mock_server.uri();
        let resp = retry_send(|| client.get(&uri).send()).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn recovers_once_the_backend_is_reachable() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = quick_client();
        let dead = dead_url();
        let live = mock_server.uri();
        let calls = AtomicU32::new(0);

        // The first two attempts target a port nothing listens on; the
        // third reaches the live server.
        let resp = retry_send(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            let target = if n < 2 { dead.clone() } else { live.clone() };
            client.get(target).send()
        })
        .await
        .unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn unreachable_backend_exhausts_the_attempt_budget() {
        let client = quick_client();
        let dead = dead_url();
        let calls = AtomicU32::new(0);

        let result = retry_send(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            client.get(&dead).send()
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), ATTEMPTS);
    }
}
