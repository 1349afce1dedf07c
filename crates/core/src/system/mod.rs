//! System-management resources: users, roles, departments, dictionaries,
//! menus, parameters, tenants and release notes.

pub mod dept;
pub mod dict;
pub mod menu;
pub mod params;
pub mod role;
pub mod tenant;
pub mod user;
pub mod version;

pub use dept::{DeptForm, DeptList, DeptListItem, DeptSearchParams};
pub use dict::{Dict, DictData, DictSearchParams};
pub use menu::{MenuAuth, MenuForm, MenuMeta, MenuRoute};
pub use params::{ParamsForm, ParamsInfo, ParamsSearchParams};
pub use role::{RoleForm, RoleList, RoleListItem, RoleSearchParams};
pub use tenant::{TenantForm, TenantInfo, TenantSearchParams};
pub use user::{UserForm, UserList, UserListItem, UserSearchParams};
pub use version::VersionInfo;
