mod client_options {
    mod headers;
    mod redirects;
    mod request_timeout;
    mod response_size;
    mod user_agent;
}
mod errors {
    mod transport_failures;
    mod unsuccessful_status;
}
mod scenarios {
    mod bearer_token;
    mod execute_with;
    mod request_header_override;
}
mod json;
mod multipart;
