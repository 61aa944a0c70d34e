//! Sample data loaded by `POST /populate`.

pub(super) const PASSWORD: &str = "password";
pub(super) const POSTS_PER_USER: usize = 5;
pub(super) const COMMENTS_PER_POST: usize = 5;

pub(super) const USERNAMES: &[&str] = &[
    "Pablito", "Lucas", "Martin", "Pedro", "Rodrigo", "Amanda", "Rigoberta", "Catalina", "Messi",
    "Ronaldo",
];

pub(super) const TITLES: &[&str] = &[
    "Mi fotaza",
    "Esta esta buena",
    "Miren lo que vi",
    "Me gusta mucho esto",
    "mireeen",
];

pub(super) const DESCRIPTIONS: &[&str] = &[
    "Miren que buena",
    "me gusta los colores",
    "esto es una foto",
    "observen",
    "hola hola",
    "cachense esta",
    "que lindo",
    "cosas que pasan",
    "esto es oro",
    "esto es fuego",
];

pub(super) const COMMENTS: &[&str] = &[
    "q lindo el futbol",
    "me gustoo",
    "buena foto",
    "fuego fuego",
    "esto es oro",
    "vamo chilee",
    "que fotaza por diosss",
    "me encantaa",
    "hola como estan",
    "messi vs ronaldo",
    "tengo hambre",
];

pub(super) fn avatar_for(username: &str) -> String {
    format!("https://avatars.integram.local/{}.png", username.to_lowercase())
}

pub(super) fn image_for(post_index: usize) -> String {
    format!("https://images.integram.local/post-{}.jpg", post_index % 7 + 1)
}
