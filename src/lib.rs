/// 内部导出的模块
mod internal;


/// 导出核心入口：会话
pub use internal::session::structs::webdav_session::WebDavSession;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::credentials::Credentials;
    pub use internal::auth::structs::webdav_auth::WebdavAuth;
}

pub mod config {
    use crate::internal;
    pub use internal::config::enums::Protocol;
    pub use internal::config::functions::check_port::check_port_number;
    pub use internal::config::structs::client_config::ClientConfig;
}

pub mod error {
    use crate::internal;
    pub use internal::error::{ConfigError, OperationFailed, WebDavError};
}

pub mod path {
    use crate::internal;
    pub use internal::path::structs::path_resolver::PathResolver;
    pub use internal::path::structs::working_directory_guard::WorkingDirectoryGuard;
}

/// 列目录得到的资源记录
pub mod resource {
    use crate::internal;
    pub use internal::resource::structs::resource_record::ResourceRecord;
}

pub mod session {
    use crate::internal;
    pub use internal::session::{DOWNLOAD_CHUNK_SIZE, MAX_REDIRECT_HOPS};
    pub use internal::session::structs::webdav_session::WebDavSession;
}

/// 对外提供webdav基础访问能力，不能限制死在会话方法中，以防有人自己要用
pub mod webdav {
    pub mod functions {
        use crate::internal;
        pub use internal::webdav::functions::send_request::SendOptions;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod traits {
        pub use crate::internal::webdav::raw_xml::impl_multi_status::*;
    }

    pub mod structs {
        pub use crate::internal::webdav::raw_xml::multi_status::*;
    }
}
