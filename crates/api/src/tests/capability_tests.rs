// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::capabilities::{Capabilities, can_mutate, compute_capabilities, require_mutation};
use crate::error::AuthError;
use crate::tests::helpers::session_with_role;
use siop_domain::Role;

#[test]
fn test_only_admin_can_mutate() {
    assert!(can_mutate(Role::Admin));
    assert!(!can_mutate(Role::Comando));
    assert!(!can_mutate(Role::User));
}

#[test]
fn test_admin_session_holds_every_capability() {
    let session = session_with_role(Role::Admin);
    let caps: Capabilities = compute_capabilities(Some(&session));
    assert!(caps.can_manage_records);
    assert!(caps.can_manage_users);
    assert!(caps.can_backup);
}

#[test]
fn test_comando_session_is_read_only() {
    let session = session_with_role(Role::Comando);
    let caps: Capabilities = compute_capabilities(Some(&session));
    assert!(!caps.can_manage_records);
    assert!(!caps.can_manage_users);
    assert!(!caps.can_backup);
}

#[test]
fn test_logged_out_holds_no_capabilities() {
    let caps: Capabilities = compute_capabilities(None);
    assert!(!caps.can_manage_records);
    assert!(!caps.can_manage_users);
    assert!(!caps.can_backup);
}

#[test]
fn test_require_mutation_allows_admin() {
    let session = session_with_role(Role::Admin);
    assert!(require_mutation(Some(&session), "delete_record").is_ok());
}

#[test]
fn test_require_mutation_rejects_non_admin_with_action_name() {
    let session = session_with_role(Role::User);
    let err = require_mutation(Some(&session), "delete_record").unwrap_err();
    assert_eq!(
        err,
        AuthError::Unauthorized {
            action: String::from("delete_record")
        }
    );
}

#[test]
fn test_require_mutation_rejects_logged_out() {
    let err = require_mutation(None, "backup_restore").unwrap_err();
    assert!(matches!(err, AuthError::Unauthorized { .. }));
}
