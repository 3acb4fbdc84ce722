//! Search-as-you-type text filtering.

/// Case-insensitive substring filter over caller-extracted fields.
///
/// A record matches when any extracted field contains `query`. The empty
/// query is the identity: every record passes, in the original order.
///
/// The extractor decides which columns are searchable, e.g. name, email,
/// phone, and cnic for patients, or disease, medicine, and patient name
/// for visit records.
pub fn text_filter<'a, T, I>(
    records: I,
    query: &str,
    fields: impl Fn(&T) -> Vec<String>,
) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            fields(record)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
