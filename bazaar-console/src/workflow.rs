//! Deactivation and deletion guards
//!
//! Categories and tags cannot be deactivated while products are still
//! assigned; positions and campaigns cannot be deleted while banners
//! still reference them. The guards here keep the client from issuing
//! calls the server would reject and steer the view into the
//! reassignment flow instead. The server re-validates regardless.
//!
//! Multi-step flows have no rollback: when the second step fails the
//! first is left in place and only the second error is surfaced.

use bazaar_client::{ApiClient, ClientResult};
use shared::models::{BannerCampaign, BannerPosition, Category, Role, Tag};

/// Result of a guarded deactivation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeactivationOutcome {
    Deactivated,
    /// Still referenced; the view must offer the reassignment flow
    NeedsReassignment { product_count: u64 },
}

/// Result of a guarded delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Still referenced by banners; the delete was not issued
    Blocked { banner_count: u64 },
}

/// Deactivate a category unless products still hang off it
pub async fn deactivate_category(
    client: &ApiClient,
    category: &Category,
) -> ClientResult<DeactivationOutcome> {
    if category.product_count > 0 {
        tracing::debug!(
            category_id = category.id,
            product_count = category.product_count,
            "deactivation blocked, products still assigned"
        );
        return Ok(DeactivationOutcome::NeedsReassignment {
            product_count: category.product_count,
        });
    }
    client.set_category_status(category.id, false).await?;
    Ok(DeactivationOutcome::Deactivated)
}

/// Bulk-move every product to another category, then retry the
/// deactivation.
pub async fn reassign_then_deactivate_category(
    client: &ApiClient,
    source: &Category,
    target_category_id: i64,
) -> ClientResult<()> {
    client
        .move_category_products(source.id, target_category_id)
        .await?;
    client.set_category_status(source.id, false).await?;
    Ok(())
}

/// Deactivate a tag unless products still carry it
pub async fn deactivate_tag(client: &ApiClient, tag: &Tag) -> ClientResult<DeactivationOutcome> {
    if tag.product_count > 0 {
        return Ok(DeactivationOutcome::NeedsReassignment {
            product_count: tag.product_count,
        });
    }
    client.set_tag_status(tag.id, false).await?;
    Ok(DeactivationOutcome::Deactivated)
}

/// Strip the tag from every product carrying it, then deactivate.
pub async fn unassign_then_deactivate_tag(client: &ApiClient, tag: &Tag) -> ClientResult<()> {
    let products = client
        .tag_products(tag.id)
        .await?
        .data
        .unwrap_or_default();
    for product in &products {
        client
            .remove_product_from_tag(tag.id, &product.item_id)
            .await?;
    }
    client.set_tag_status(tag.id, false).await?;
    Ok(())
}

/// Delete a banner position unless banners still occupy it
pub async fn delete_position(
    client: &ApiClient,
    position: &BannerPosition,
) -> ClientResult<DeleteOutcome> {
    if position.banner_count > 0 {
        return Ok(DeleteOutcome::Blocked {
            banner_count: position.banner_count,
        });
    }
    client.delete_banner_position(position.id).await?;
    Ok(DeleteOutcome::Deleted)
}

/// Delete a banner campaign unless banners still reference it
pub async fn delete_campaign(
    client: &ApiClient,
    campaign: &BannerCampaign,
) -> ClientResult<DeleteOutcome> {
    if campaign.banner_count > 0 {
        return Ok(DeleteOutcome::Blocked {
            banner_count: campaign.banner_count,
        });
    }
    client.delete_banner_campaign(campaign.id).await?;
    Ok(DeleteOutcome::Deleted)
}

/// Whether the roles screen may offer edit and delete for a role.
/// The Super Admin role is immutable.
pub fn role_editable(role: &Role) -> bool {
    !role.is_super_admin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_role_is_not_editable() {
        let super_admin = Role {
            id: shared::models::SUPER_ADMIN_ROLE_ID,
            name: "Super Admin".into(),
            description: None,
            created_at: None,
        };
        assert!(!role_editable(&super_admin));

        let editor = Role { id: 4, ..super_admin };
        assert!(role_editable(&editor));
    }
}
