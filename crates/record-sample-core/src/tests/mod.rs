mod audio;
mod presentation;
