
mod catalog;
mod doctor;
mod metadata;
mod misc;
mod setup;
