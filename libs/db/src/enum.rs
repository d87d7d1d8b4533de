use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// The meal a [`time_slot`](crate::time_slot) can be reserved for
#[derive(
	Clone, Copy, DbEnum, Debug, Deserialize, Hash, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::MealType"]
#[DbValueStyle = "PascalCase"]
pub enum MealType {
	Breakfast,
	Lunch,
	Dinner,
}

impl MealType {
	/// Every meal of a day, in serving order
	pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];
}

#[derive(
	Clone, Copy, DbEnum, Debug, Default, Deserialize, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::TableStatus"]
#[DbValueStyle = "PascalCase"]
pub enum TableStatus {
	#[default]
	Available,
	Booked,
}
