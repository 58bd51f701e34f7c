fn main() {
    footy_web::start();
}
