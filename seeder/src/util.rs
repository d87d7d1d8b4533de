use clap::Error;
use clap::error::ErrorKind;
use common::DbConn;
use diesel::{PgConnection, QueryResult};

/// Report any displayable error as a CLI I/O error
pub fn io_error(err: impl std::fmt::Display) -> Error {
	Error::raw(ErrorKind::Io, err.to_string())
}

/// Insert items in chunks of `chunk_size` and collect the ids of the rows
/// the inserter created
pub async fn insert_returning_ids<T, F>(
	conn: &DbConn,
	mut items: Vec<T>,
	chunk_size: usize,
	inserter: F,
) -> Result<Vec<i32>, Error>
where
	T: Send + 'static,
	F: Fn(&mut PgConnection, Vec<T>) -> QueryResult<Vec<i32>>
		+ Send
		+ Copy
		+ 'static,
{
	let size = items.len();
	let mut ids = Vec::with_capacity(size);

	while !items.is_empty() {
		let chunk =
			items.drain(..chunk_size.min(items.len())).collect::<Vec<_>>();

		let mut chunk_ids = conn
			.interact(move |c| inserter(c, chunk))
			.await
			.map_err(io_error)?
			.map_err(io_error)?;

		ids.append(&mut chunk_ids);

		println!("Inserted {}/{size} rows", ids.len());
	}

	Ok(ids)
}
