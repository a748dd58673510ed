#[cfg(test)]
mod tests {
    use std::sync::{Arc, OnceLock};

    use http_body_util::BodyExt;
    use hyper::header::CONTENT_TYPE;
    use nestnet::{Body, RequestDescriptor};
    use serde::{Deserialize, Serialize};

    use crate::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct NewItem {
        name: String,
        tags: Vec<String>,
    }

    fn capture_fixture(
        path: &str,
    ) -> (HyperFixtureHandle, Arc<OnceLock<(Bytes, Option<String>)>>) {
        let received = Arc::new(OnceLock::new());
        let handle = crate::add_hyper_fixture(path, {
            let received = Arc::clone(&received);
            move |req| {
                let received = Arc::clone(&received);
                async move {
                    let content_type = req
                        .headers()
                        .get(CONTENT_TYPE)
                        .map(|v| v.to_str().unwrap().to_owned());
                    let body = req.into_body().collect().await.unwrap().to_bytes();
                    received.set((body, content_type)).ok();
                    let res = Response::new(Full::new(Bytes::from_static(br#"{"id":7}"#)));
                    (res, Ok(()))
                }
            }
        });
        (handle, received)
    }

    #[test]
    fn test_body_json_bytes() {
        const PATH: &str = "json/bytes";
        const JSON: &[u8] = br#"{"name":"verbatim" , "tags":[]}"#;
        let (_handle, received) = capture_fixture(PATH);

        let (host, builder) = crate::init_builder().unwrap();
        let dispatcher = builder.build().unwrap();
        let descriptor = RequestDescriptor::put(host, PATH).with_body(Body::json_bytes(JSON));
        let response = TOKIO_RT
            .block_on(dispatcher.execute(&descriptor))
            .into_result()
            .unwrap();
        assert_eq!(response, br#"{"id":7}"#);

        let (body, content_type) = received.get().unwrap();
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(&body[..], JSON);
    }

    #[test]
    fn test_body_json_serialize() {
        const PATH: &str = "json/serialize";
        let (_handle, received) = capture_fixture(PATH);

        let (host, builder) = crate::init_builder().unwrap();
        let dispatcher = builder.build().unwrap();
        let descriptor = RequestDescriptor::post(host, PATH).with_body(Body::json(NewItem {
            name: "widget".into(),
            tags: vec!["a".into(), "b c".into()],
        }));
        let outcome = TOKIO_RT.block_on(dispatcher.execute(&descriptor));
        assert!(outcome.is_success(), "{outcome:?}");

        let (body, content_type) = received.get().unwrap();
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let item: NewItem = serde_json::from_slice(body).unwrap();
        assert_eq!(
            item,
            NewItem {
                name: "widget".into(),
                tags: vec!["a".into(), "b c".into()],
            }
        );
    }
}
