pub mod dislike_service;
