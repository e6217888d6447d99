pub mod video_service;
pub mod youtube;

#[cfg(test)]
pub mod testing;
