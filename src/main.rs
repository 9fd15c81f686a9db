//! Scripted demo of the quest core: an elder hands out a fetch quest,
//! the player finds the herb, and the completion check pays out.

use questline::items::catalog::{health_potion, mystery_herb};
use questline::quests::catalog::{herb_quest, monster_cull_quest};
use questline::{Npc, Player, Shop};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!(
        "questline demo ({} built {})",
        questline::build_info::BUILD_COMMIT,
        questline::build_info::BUILD_DATE
    );

    let mut player = Player::new("Roland", 100, 15).with_gold(40);

    let mut elder = Npc::new("Village Elder", "A shifty old man");
    elder.add_dialogue("Greet him", "Welcome, traveler");
    elder.add_dialogue("Ask about work", "The forest crawls with beasts. Help me?");
    elder.add_dialogue(
        "Ask about the herb",
        "Deep in the forest grows a herb. Bring me some.",
    );

    println!("\n=== Talking to {} ===", elder.name);
    for (i, prompt) in elder.options().iter().enumerate() {
        println!("{}. {prompt}", i + 1);
    }
    // Scripted choice: ask about the herb
    if let Some(response) = elder.respond(2) {
        println!("{}: {response}", elder.name);
    }

    player.quests.add_quest(herb_quest());
    player.quests.add_quest(monster_cull_quest());
    player.quests.start_quest("find_herbs").expect("quest just registered");

    println!("\n{}", player.quests.journal());

    let mut shop = Shop::new("The Gilded Flask", "Potions and oddities");
    shop.add_item(health_potion(), 30);
    println!("\n{}", shop.price_list());
    if shop.buy(0, &mut player).is_ok() {
        println!("Bought a potion; {} gold left", player.gold);
    }

    println!("\n=== The player finds the herb ===");
    player.pick_up_item(mystery_herb());

    for completion in player.check_quests() {
        println!(
            "*** Quest complete: {} (+{} gold) ***",
            completion.quest_name, completion.reward_gold
        );
        if let Some(item) = completion.reward_item {
            println!("    Reward item: {}", item.info_line());
        }
    }

    println!("\n{}", player.quests.journal());
    println!("\n{}", player.inventory.listing());
    println!("\nGold: {}", player.gold);
}
