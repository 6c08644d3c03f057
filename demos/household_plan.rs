//! 家庭生骨肉規劃範例
//!
//! 建立一隻貓、設定補充劑、入庫與採購，最後輸出飲食計劃、分裝計劃與庫存總覽。
//!
//! ```text
//! cargo run --example household_plan [store-config.json]
//! ```

use rawpaws::{
    Cat, FileStore, Household, InventoryDraft, InventoryModule, InventoryStatus, PlannerConfig,
    PurchaseDraft, StoreConfig, Supplement, SupplementUnit, SystemClock,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===== RawPaws Household Plan =====\n");

    // 步驟 1: 載入資料
    let store_config = match std::env::args().nth(1) {
        Some(path) => StoreConfig::from_json_file(path)?,
        None => StoreConfig::default(),
    };
    println!("[1] Data directory: {}", store_config.data_dir.display());

    let store = FileStore::open(&store_config.data_dir)?;
    let mut home = Household::load(
        store,
        store_config,
        PlannerConfig::default(),
        Box::new(SystemClock),
    )?;
    println!(
        "    {} cats, {} meats, {} inventory items\n",
        home.cats().len(),
        home.meats().meats().len(),
        home.inventory().items().len()
    );

    // 步驟 2: 確保有一隻貓
    let existing = home.cats().cats().first().map(|cat| cat.id.clone());
    let cat_id = match existing {
        Some(id) => id,
        None => {
            let birth = home.today() - chrono::Duration::days(800);
            let id = home.add_cat(Cat::new(String::new(), "咪咪".to_string(), birth))?;
            home.add_supplement(
                &id,
                Supplement::by_food_ratio(String::new(), "蛋壳粉".to_string(), Decimal::new(5, 1)),
            )?;
            home.add_supplement(
                &id,
                Supplement::fixed_daily(
                    String::new(),
                    "鱼油".to_string(),
                    SupplementUnit::Pump,
                    Decimal::ONE,
                ),
            )?;
            id
        }
    };

    // 步驟 3: 飲食計劃
    let plan = home.diet_plan(&cat_id)?;
    println!("[2] Diet plan for {} ({}, {})", plan.cat_name, plan.life_stage.label(), plan.age);
    println!(
        "    Daily total: {} g, per meal: {} g",
        plan.ratios.daily_total, plan.ratios.per_meal
    );
    for portion in &plan.ratios.portions {
        println!(
            "      - {} {}% {} g",
            portion.category.label(),
            portion.percent,
            portion.daily_grams
        );
    }
    for dose in &plan.supplements {
        println!("      * {} {} ({})", dose.name, dose.display_daily(), dose.rule);
    }
    for warning in &plan.warnings {
        println!("    ! {}", warning.message);
    }
    println!();

    // 步驟 4: 分裝計劃
    let packaging = home.packaging_plan(&cat_id)?;
    println!(
        "[3] Weekly packaging: {} g in {} bags",
        packaging.weekly_total.round(),
        packaging.total_meals
    );
    for bag in &packaging.bags {
        println!(
            "      - {} {} g ≈ {} bags ({} g each)",
            bag.category.label(),
            bag.grams_needed,
            bag.bag_count,
            bag.even_grams_per_bag
        );
    }
    for stock in &packaging.supplements {
        println!(
            "      * {} for {} days: {}",
            stock.name,
            home.config().supplement_days,
            stock.display
        );
    }
    println!();

    // 步驟 5: 入庫與採購
    if home.inventory().items().is_empty() {
        // 類別由肉類資料庫帶入（鸡肉 → 白肉）
        let chicken = InventoryDraft::new(InventoryModule::Meat, "鸡肉", Decimal::from(1000));
        let chicken = home.add_inventory(chicken)?;
        home.set_inventory_status(&[chicken], InventoryStatus::Consuming)?;
        let bones = InventoryDraft::new(InventoryModule::Bone, "鸡骨架", Decimal::from(300));
        home.add_inventory(bones)?;

        let purchase = home.add_purchase(PurchaseDraft::new(
            InventoryModule::Organ,
            "鸡心",
            Decimal::from(250),
        ))?;
        let coverage = home.purchase_coverage(InventoryModule::Organ);
        println!("[4] Pending organ purchase covers {} days", coverage.display);
        home.confirm_arrival(&[purchase])?;
        println!("    Arrival confirmed\n");
    }

    // 步驟 6: 庫存總覽
    let summary = home.inventory_summary()?;
    println!("[5] Inventory summary");
    for status in &summary.modules {
        let restock = status
            .restock
            .top_up()
            .map(|g| format!(", top up {} g", g))
            .unwrap_or_default();
        println!(
            "      - {} {} g, {} days{}",
            status.module.label(),
            status.total_grams,
            rawpaws::model::quantity::format_fixed(status.days, 1),
            restock
        );
    }
    for projection in &summary.projections {
        println!(
            "      > {} runs out on {} ({} days left)",
            projection.name, projection.end_date, projection.days_remaining
        );
    }
    for warning in &summary.warnings {
        println!("    ! [{}] {}", warning.subject, warning.message);
    }

    println!("\n===== Done =====");
    Ok(())
}
