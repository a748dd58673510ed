#[cfg(test)]
mod tests {
    use std::sync::{Arc, OnceLock};

    use http_body_util::BodyExt;
    use hyper::header::CONTENT_TYPE;
    use memchr::memmem;
    use nestnet::{Body, Part, RequestDescriptor};

    use crate::*;

    #[test]
    fn test_body_multipart() {
        const PATH: &str = "requests/body_multipart";
        let received_facts = Arc::new(OnceLock::new());
        let _handle = crate::add_hyper_fixture(PATH, {
            let received_facts = Arc::clone(&received_facts);
            move |req: Request<body::Incoming>| {
                let received_facts = Arc::clone(&received_facts);
                async move {
                    let content_type = req
                        .headers()
                        .get(CONTENT_TYPE)
                        .map(|v| v.to_str().unwrap().to_owned());
                    let body = req.into_body().collect().await.unwrap().to_bytes();
                    received_facts.set((body, content_type)).ok();
                    let res = Response::new(Full::new(Default::default()));
                    (res, Ok(()))
                }
            }
        });

        let (host, builder) = crate::init_builder().unwrap();
        let dispatcher = builder.build().unwrap();
        let descriptor = RequestDescriptor::post(host, PATH).with_body(Body::multipart([
            Part::text("text", "ttt"),
            Part::file("filename", "3253212.mp3", "audio/mpeg", &b"ID3\r\n\x00"[..]),
            Part::text("empty", ""),
        ]));
        let outcome = TOKIO_RT.block_on(dispatcher.execute(&descriptor));
        assert!(outcome.is_success(), "{outcome:?}");

        let (body, content_type) = received_facts.get().unwrap();
        let boundary = content_type
            .as_deref()
            .unwrap()
            .strip_prefix("multipart/form-data; boundary=Boundary-")
            .map(|rest| format!("Boundary-{rest}"))
            .unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(
            format!(
                "--{boundary}\r\n\
                Content-Disposition: form-data; name=\"text\"\r\n\
                \r\n\
                ttt--{boundary}\r\n\
                Content-Disposition: form-data; name=\"filename\"; filename=\"3253212.mp3\"\r\n\
                Content-Type: \"audio/mpeg\"\r\n\
                \r\n"
            )
            .as_bytes(),
        );
        expected.extend_from_slice(b"ID3\r\n\x00");
        expected.extend_from_slice(
            format!(
                "--{boundary}\r\n\
                Content-Disposition: form-data; name=\"empty\"\r\n\
                \r\n\
                \r\n--{boundary}--"
            )
            .as_bytes(),
        );
        assert_eq!(&body[..], &expected[..]);
        assert_eq!(
            memmem::find_iter(body, format!("--{boundary}").as_bytes()).count(),
            4
        );
    }
}
