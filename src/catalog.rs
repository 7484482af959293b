//! Fixed product catalog
//!
//! The catalog is defined at startup and never mutated. Entries keep the
//! storefront's native display order.

use crate::types::ProductId;

/// One purchasable product. Products are immutable, so cart entries hold
/// full copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub brand: &'static str,
    pub name: &'static str,
    /// Whole rupees. The shop does not price in paisa.
    pub price: u64,
    pub image_url: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        brand: "Apple",
        name: "iPhone 15 Pro Max",
        price: 499_999,
        image_url: "https://shop.apple.com/v/iphone/home/bu/images/overview/select/iphone_15_pro_max_natural_titanium__e51g3b6n2566_large.png",
    },
    Product {
        id: 2,
        brand: "Samsung",
        name: "Galaxy S24 Ultra",
        price: 439_999,
        image_url: "https://images.samsung.com/is/image/samsung/p6pim/pk/sm-s928bztqmea/gallery/pk-galaxy-s24-s928-sm-s928bztqmea-539423531?$650_519_PNG$",
    },
    Product {
        id: 3,
        brand: "Google",
        name: "Pixel 8 Pro",
        price: 289_999,
        image_url: "https://lh3.googleusercontent.com/zWzY1mI9Z8u4yW1H2k8_UeD_3Xf8E0G_E-N7i0Fw9D_4GfB_zXq9W_a_8yQ2D6aF8W9D_4GfB_zXq9W_a_8yQ2D6aF8W9D_4GfB_zXq9W",
    },
    Product {
        id: 4,
        brand: "OnePlus",
        name: "OnePlus 12",
        price: 250_000,
        image_url: "https://oasis.opstatics.com/content/dam/oasis/page/2023/global/product/wats/green.png",
    },
    Product {
        id: 5,
        brand: "Xiaomi",
        name: "Xiaomi 14 Ultra",
        price: 350_000,
        image_url: "https://i01.appmifile.com/v1/MI_18455B3E4DA706226CF7535A58E875F0267/pms_1708688432.18134768.png",
    },
    Product {
        id: 6,
        brand: "Samsung",
        name: "Galaxy Z Fold 5",
        price: 489_999,
        image_url: "https://images.samsung.com/is/image/samsung/p6pim/pk/sm-f946bzkgmea/gallery/pk-galaxy-z-fold5-f946-sm-f946bzkgmea-537418701?$650_519_PNG$",
    },
];

/// Read-only view over the built-in product list.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog { products: PRODUCTS }
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        self.products
    }

    /// First product with the given id, or `None`.
    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_round_trips_every_product() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            assert_eq!(catalog.lookup(product.id), Some(product));
        }
    }

    #[test]
    fn lookup_unknown_id_is_not_found() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lookup(0), None);
        assert_eq!(catalog.lookup(999), None);
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_is_not_empty() {
        assert!(!Catalog::builtin().is_empty());
        assert_eq!(Catalog::builtin().len(), 6);
    }
}
