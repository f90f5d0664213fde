pub mod config;
pub mod files;

pub use config::{load_config, save_config, AppConfig};
pub use files::{
    atomic_write, config_file, ensure_app_dir, get_app_dir, init_local_dir, log_file, read_file,
};
