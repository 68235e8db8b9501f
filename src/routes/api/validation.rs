use crate::error::AppError;

/// Create bodies must not carry an identifier.
pub fn ensure_new<T>(entity: &'static str, id: Option<&T>) -> Result<(), AppError> {
    if id.is_some() {
        return Err(AppError::validation(
            format!("A new {entity} cannot already have an ID"),
            entity,
            "idexists",
        ));
    }
    Ok(())
}

/// Update bodies must carry the identifier named in the path.
pub fn ensure_path_id<T: PartialEq>(
    entity: &'static str,
    path_id: &T,
    body_id: Option<&T>,
) -> Result<(), AppError> {
    match body_id {
        None => Err(AppError::validation("Invalid id", entity, "idnull")),
        Some(body_id) if body_id != path_id => {
            Err(AppError::validation("Invalid ID", entity, "idinvalid"))
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entities_reject_preset_ids() {
        assert!(ensure_new::<i64>("userLogin", None).is_ok());

        let err = ensure_new("userLogin", Some(&7_i64)).expect_err("id present");
        assert_eq!(err.error_key(), Some("idexists"));
        assert_eq!(err.message(), "A new userLogin cannot already have an ID");
    }

    #[test]
    fn path_and_body_ids_must_agree() {
        let path = "a1".to_string();

        assert!(ensure_path_id("alarm", &path, Some(&"a1".to_string())).is_ok());

        let err = ensure_path_id("alarm", &path, None).expect_err("missing id");
        assert_eq!(err.error_key(), Some("idnull"));

        let err = ensure_path_id("alarm", &path, Some(&"a2".to_string())).expect_err("mismatch");
        assert_eq!(err.error_key(), Some("idinvalid"));
    }
}
