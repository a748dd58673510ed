#[cfg(test)]
mod tests {
    use http_body_util::Full;
    use nestnet::{DispatchOutcome, Error, RequestDescriptor};

    use crate::*;

    #[test]
    fn test_response_size_limit() {
        const PATH: &str = "client_options/response_size_limit";

        let _handle = crate::add_hyper_fixture(PATH, |_| async move {
            let res = Response::new(Full::new(Bytes::from(vec![b'a'; 4096])));
            (res, Ok(()))
        });

        let (host, builder) = crate::init_builder().unwrap();
        let limited = builder.clone().max_response_buffer_size(1024).build().unwrap();
        let outcome = TOKIO_RT.block_on(limited.execute(&RequestDescriptor::get(host.clone(), PATH)));
        assert!(
            matches!(outcome, DispatchOutcome::Failure(Error::ResponseTooLarge)),
            "{outcome:?}"
        );

        let roomy = builder.max_response_buffer_size(8192).build().unwrap();
        let res = TOKIO_RT
            .block_on(roomy.execute(&RequestDescriptor::get(host, PATH)))
            .into_result()
            .unwrap();
        assert_eq!(res.len(), 4096);
    }
}
