/// 虚拟工作目录与请求地址解析
///
/// - `base_url` 构造后不再变化
/// - `current_working_directory` 始终以 `/` 开头并以 `/` 结尾，根目录就是 `"/"`
///
/// 所有操作都是纯字符串运算，不会访问服务端，也不会处理 `..` 或重复斜杠。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base_url: String,
    current_working_directory: String,
}

impl PathResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            current_working_directory: "/".to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn current_working_directory(&self) -> &str {
        &self.current_working_directory
    }

    /// 把路径解析成完整 URL
    ///
    /// - 以 `/` 开头：`base_url + path`
    /// - 其他：`base_url + current_working_directory + path`
    pub fn resolve(&self, path: &str) -> String {
        let path = path.trim();
        if path.starts_with('/') {
            return format!("{}{}", self.base_url, path);
        }

        format!("{}{}{}", self.base_url, self.current_working_directory, path)
    }

    /// 切换工作目录，空输入不做任何处理
    ///
    /// 绝对路径直接替换，相对路径追加在当前目录之后。
    pub fn change_directory(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }

        let stripped = path
            .split('/')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("/")
            + "/";

        if stripped == "/" {
            self.current_working_directory = stripped;
        } else if path.starts_with('/') {
            self.current_working_directory = format!("/{}", stripped);
        } else {
            self.current_working_directory.push_str(&stripped);
        }

        tracing::debug!(
            cwd = %self.current_working_directory,
            "工作目录已切换"
        );
    }
}
