use aws_sdk_bedrockruntime::Client;

pub fn build_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
