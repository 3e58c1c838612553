/// Trait describing how a row type maps onto its table.
///
/// ```ignore
/// impl Entity for Planet {
///     type Id = i64;
///     fn table_name() -> &'static str { "planet" }
///     fn display_name() -> &'static str { "Planet" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] { &["id", "planet_name", "climate"] }
///     fn id(&self) -> &i64 { &self.id }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    type Id: Send + Sync + ToString + 'static;

    fn table_name() -> &'static str;

    /// Human-readable name used in messages ("Character not found").
    fn display_name() -> &'static str;

    fn id_column() -> &'static str;

    /// Columns selected when loading the entity. Secrets stay out of this list.
    fn columns() -> &'static [&'static str];

    fn id(&self) -> &Self::Id;

    fn select_all_sql() -> String {
        format!(
            "SELECT {} FROM {} ORDER BY {}",
            column_list(Self::columns()),
            quote(Self::table_name()),
            quote(Self::id_column()),
        )
    }

    fn select_by_id_sql() -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = ?",
            column_list(Self::columns()),
            quote(Self::table_name()),
            quote(Self::id_column()),
        )
    }

    fn exists_sql() -> String {
        format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?)",
            quote(Self::table_name()),
            quote(Self::id_column()),
        )
    }

    fn count_sql() -> String {
        format!("SELECT COUNT(*) FROM {}", quote(Self::table_name()))
    }
}

/// Double-quote an SQL identifier (`user` is a keyword in most dialects).
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| quote(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Droid {
        id: i64,
    }

    impl Entity for Droid {
        type Id = i64;

        fn table_name() -> &'static str {
            "droid"
        }

        fn display_name() -> &'static str {
            "Droid"
        }

        fn id_column() -> &'static str {
            "id"
        }

        fn columns() -> &'static [&'static str] {
            &["id", "model"]
        }

        fn id(&self) -> &i64 {
            &self.id
        }
    }

    #[test]
    fn select_statements_quote_identifiers() {
        assert_eq!(
            Droid::select_all_sql(),
            r#"SELECT "id", "model" FROM "droid" ORDER BY "id""#
        );
        assert_eq!(
            Droid::select_by_id_sql(),
            r#"SELECT "id", "model" FROM "droid" WHERE "id" = ?"#
        );
        assert_eq!(Droid::count_sql(), r#"SELECT COUNT(*) FROM "droid""#);
        assert_eq!(*Droid { id: 3 }.id(), 3);
    }

    #[test]
    fn quote_escapes_embedded_quotes() {
        assert_eq!(quote("we\"ird"), "\"we\"\"ird\"");
    }
}
