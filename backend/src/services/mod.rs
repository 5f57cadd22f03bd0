pub mod video_service;
pub mod youtube_service;

#[cfg(test)]
pub mod test_support;
