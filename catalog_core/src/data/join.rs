use tracing::debug;

use crate::error::CatalogError;

use super::{catalog::Catalog, category::Category, product::Product, user::User};

/// A product together with its category and the category's owner.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Row {
    pub product: Product,
    pub category: Category,
    pub user: User,
}

/// Resolves every product of the catalog against its category and that
/// category's owner. Rows come out in the order the products were added.
///
/// Fails on the first product whose category is missing, or whose category's
/// owner is missing.
pub fn join(catalog: &Catalog) -> Result<Vec<Row>, CatalogError> {
    let rows = catalog
        .products()
        .map(|product| {
            let category = catalog.get_category(&product.category_id).ok_or(
                CatalogError::UnknownCategory { product: product.id, category: product.category_id },
            )?;
            let user = catalog.get_user(&category.owner_id).ok_or(CatalogError::UnknownOwner {
                category: category.id,
                owner: category.owner_id,
            })?;
            Ok(Row { product: product.clone(), category: category.clone(), user: user.clone() })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    debug!(rows = rows.len(), "joined catalog");
    Ok(rows)
}

#[cfg(test)]
mod test {
    use super::super::{
        category::CategoryId,
        product::ProductId,
        user::{Sex, UserId},
    };
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_parts(
            vec![User::new(1, "Roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
            vec![Category::new(1, "Grocery", "🍞", 2), Category::new(2, "Drinks", "🍺", 1)],
            vec![Product::new(1, "Milk", 2), Product::new(2, "Bread", 1), Product::new(3, "Beer", 2)],
        )
        .unwrap()
    }

    #[test]
    fn join_resolves_foreign_keys() {
        let catalog = catalog();
        let rows = join(&catalog).unwrap();

        assert_eq!(
            rows.iter().map(|row| row.product.id).collect::<Vec<_>>(),
            vec![ProductId(1), ProductId(2), ProductId(3)]
        );
        for row in &rows {
            assert_eq!(row.category.id, row.product.category_id);
            assert_eq!(row.user.id, row.category.owner_id);
        }
        assert_eq!(rows[1].category.title, "Grocery");
        assert_eq!(rows[1].user.name, "Anna");
    }

    #[test]
    fn join_empty_catalog() {
        assert_eq!(join(&Catalog::new()).unwrap(), Vec::<Row>::new());
    }

    #[test]
    fn join_reports_unknown_category() {
        let mut catalog = catalog();
        catalog.add_product(Product::new(4, "Cheese", 9)).unwrap();

        assert!(matches!(
            join(&catalog),
            Err(CatalogError::UnknownCategory { product: ProductId(4), category: CategoryId(9) })
        ));
    }

    #[test]
    fn join_reports_unknown_owner() {
        let mut catalog = catalog();
        catalog.add_category(Category::new(3, "Toys", "🧸", 5)).unwrap();
        catalog.add_product(Product::new(4, "Ball", 3)).unwrap();

        assert!(matches!(
            join(&catalog),
            Err(CatalogError::UnknownOwner { category: CategoryId(3), owner: UserId(5) })
        ));
    }
}
