//! 应用设置模块
//!
//! 设置以 JSON 文件保存：默认动作、字面量类型、是否写回剪贴板。
//! 文件缺失或内容损坏时回退到默认值，不阻塞主流程；
//! 命令行参数优先于文件中的值。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::error::AppError;
use crate::literal::LiteralType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub action: Action,
    #[serde(default)]
    pub literal: LiteralType,
    #[serde(default = "default_write_back")]
    pub write_back: bool,
}

fn default_write_back() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            action: Action::default(),
            literal: LiteralType::default(),
            write_back: default_write_back(),
        }
    }
}

impl Settings {
    /// 从文件加载设置，失败时回退到默认值
    pub fn load_from_path(path: &Path) -> Settings {
        if !path.exists() {
            log::debug!("设置文件不存在，使用默认设置: {}", path.display());
            return Settings::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("读取设置文件失败，使用默认设置: {}", e);
                return Settings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("解析设置文件失败，使用默认设置: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Settings(format!("创建设置目录失败: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Settings(format!("序列化设置失败: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| AppError::Settings(format!("写入设置文件失败: {}", e)))?;
        Ok(())
    }

    /// 用命令行给出的值覆盖文件中的值
    pub fn with_overrides(
        mut self,
        action: Option<Action>,
        literal: Option<LiteralType>,
        write_back: Option<bool>,
    ) -> Settings {
        if let Some(action) = action {
            self.action = action;
        }
        if let Some(literal) = literal {
            self.literal = literal;
        }
        if let Some(write_back) = write_back {
            self.write_back = write_back;
        }
        self
    }
}
