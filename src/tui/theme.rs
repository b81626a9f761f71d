use ratatui::style::Color;

// Logo colors
pub const LOGO_CORAL: Color = Color::Rgb(232, 131, 136);     // #E88388
pub const LOGO_GOLD: Color = Color::Rgb(219, 171, 121);      // #DBAB79
pub const LOGO_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const LOGO_MINT: Color = Color::Rgb(161, 193, 129);       // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const CONTROL_BG: Color = Color::Rgb(48, 48, 48);         // #303030
pub const TRACK_DIM: Color = Color::Rgb(64, 64, 64);          // #404040

// Slide fills, cycled by index
pub const SLIDE_COLORS: [Color; 6] = [
    Color::Rgb(94, 129, 172),  // #5E81AC
    Color::Rgb(163, 190, 140), // #A3BE8C
    Color::Rgb(208, 135, 112), // #D08770
    Color::Rgb(180, 142, 173), // #B48EAD
    Color::Rgb(235, 203, 139), // #EBCB8B
    Color::Rgb(136, 192, 208), // #88C0D0
];
