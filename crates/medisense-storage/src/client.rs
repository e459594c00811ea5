use aws_sdk_s3::Client;

pub fn build_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
