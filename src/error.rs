//! 全局错误类型定义

use informativa_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum InformativaError {
    // 模式库相关错误
    #[error("Pattern engine error: {0}")]
    Engine(#[from] CoreError),
    #[error("Scanner not initialized")]
    ScannerNotInitialized,

    // 检查项相关错误
    #[error("Checklist load failed: {0}")]
    ChecklistLoadError(String),

    // LLM 相关错误
    #[error("Unknown LLM provider: {0}")]
    UnknownProvider(String),
    #[error("Missing API key: {0} is not set")]
    MissingApiKey(&'static str),
    #[error("Invalid LLM response: {0}")]
    LlmResponse(String),

    // 网络相关错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON error: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    #[error("URL parse error: {0}")]
    UrlError(#[from] UrlParseError),
}

// 全局Result类型
pub type InfResult<T> = Result<T, InformativaError>;
