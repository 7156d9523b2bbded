use std::fmt::{self, Formatter};

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Queue;

impl Serialize for Queue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for value in self {
			seq.serialize_element(value)?;
		}
		seq.end()
	}
}

impl<'de> Deserialize<'de> for Queue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct SeqVisitor {}

		impl<'de> Visitor<'de> for SeqVisitor {
			type Value = Queue;

			fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
				formatter.write_str("a sequence of strings")
			}

			fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut queue = Queue::new();

				while let Some(value) = access.next_element::<String>()? {
					queue
						.insert_tail(&value)
						.map_err(serde::de::Error::custom)?;
				}

				Ok(queue)
			}
		}

		let visitor = SeqVisitor {};
		deserializer.deserialize_seq(visitor)
	}
}
