#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use http_body_util::Full;
    use nestnet::{DispatchOutcome, Error, RequestDescriptor};

    use crate::*;

    const BODY: &str = "1234567890";

    async fn delayed_response_handler(secs: u64) -> FixtureAssertionResult {
        tokio::time::sleep(Duration::from_secs(secs)).await;
        let res = Response::new(Full::new(Bytes::from(BODY)));
        (res, Ok(()))
    }

    #[test]
    fn test_request_timeout() {
        const PATH: &str = "client_options/request_timeout";

        let _handle = crate::add_hyper_fixture(PATH, |_| delayed_response_handler(30));

        let time_start = Instant::now();
        let (host, builder) = crate::init_builder().unwrap();
        let dispatcher = builder
            .request_timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        let outcome = TOKIO_RT.block_on(dispatcher.execute(&RequestDescriptor::get(host, PATH)));
        assert!(
            matches!(outcome, DispatchOutcome::Failure(Error::RequestTimeout)),
            "{outcome:?}"
        );
        assert!(time_start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_request_didnt_timeout() {
        const PATH: &str = "client_options/request_didnt_timeout";

        let _handle = crate::add_hyper_fixture(PATH, |_| delayed_response_handler(1));

        let (host, builder) = crate::init_builder().unwrap();
        let dispatcher = builder
            .request_timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        let res = TOKIO_RT
            .block_on(dispatcher.execute(&RequestDescriptor::get(host, PATH)))
            .into_result()
            .unwrap();
        assert_eq!(res, BODY.as_bytes());
    }
}
