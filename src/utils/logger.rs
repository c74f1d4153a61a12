// 日誌工具

use std::fs::File;

/// 日誌檔名（除錯模式下寫在系統暫存目錄，避免蓋掉編輯畫面）
pub const LOG_FILE_NAME: &str = "zebra.log";

pub fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if debug {
        builder.filter_level(log::LevelFilter::Debug);
        let path = std::env::temp_dir().join(LOG_FILE_NAME);
        match File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(err) => eprintln!("Warning: cannot create log file {}: {}", path.display(), err),
        }
    } else {
        builder.filter_level(log::LevelFilter::Error);
    }

    // 測試中可能重複初始化
    let _ = builder.try_init();
}
