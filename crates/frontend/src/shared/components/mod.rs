pub mod loading_overlay;
