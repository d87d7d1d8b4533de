//! Custom middleware definitions

mod access_key;

pub use access_key::{
	ACCESS_KEY_HEADER,
	ACCESS_KEY_QUERY_PARAM,
	AccessKeyLayer,
};
